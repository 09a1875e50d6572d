mod remote_path_ext;

pub use remote_path_ext::{REMOTE_SEPARATOR, RemotePathExt};
