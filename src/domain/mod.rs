pub mod contact;
pub mod search;
pub mod store;

use crate::errors::AppError;
use contact::{Contact, Draft};
