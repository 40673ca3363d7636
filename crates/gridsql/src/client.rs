use std::fmt::Debug;

/// Handle to the remote data grid that services SQL for a [`Connection`].
///
/// The client is built and shut down by the application; a connection only keeps a shared
/// reference to it. Creating statements and validating their capabilities never calls into
/// the client, so any transport-specific type can be plugged in here.
///
/// [`Connection`]: crate::Connection
pub trait GridClient: Debug + Send + Sync + 'static {}
