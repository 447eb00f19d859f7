pub use crate::cli::{command, run::run_app};
pub use crate::config::Settings;
pub use crate::domain::{
    contact::{self, Contact, ContactRecord, Draft, DraftField},
    search::search,
    store::{ContactStore, EditTarget, LoadSource, Mode, STORAGE_KEY},
};
pub use crate::errors::AppError;
pub use crate::storage::{
    SeedSource, SnapshotStorage, StorageMediums,
    file::FileStorage,
    memory::{MemoryStorage, NoSeed, StaticSeed},
    remote::RemoteSeed,
};
