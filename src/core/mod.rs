// Core modules implementing the conduit transport, sources, and stages.
pub mod conduit;
pub mod source;
pub mod stage;
