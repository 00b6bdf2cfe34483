mod id;

pub use self::id::{FIRMWARE_OWNER, FIRMWARE_REPO, RepoId, RepoIdParseError};
