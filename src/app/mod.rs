//! Application use cases.

mod activity;
mod bootstrap;

pub use activity::{
    activity_list, activity_signup, activity_unregister, ActivityDto, ActivityMap, MessageDto,
};
pub use bootstrap::{initialize, initialize_with, BootstrapReport};
