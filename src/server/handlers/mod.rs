mod info;
mod user_create;
mod user_delete;
mod user_get;
mod user_list;
mod user_update;

pub use info::{health, root, test_status, ServiceInfo, StatusResponse, SERVICE_DESCRIPTION, SERVICE_NAME};
pub use user_create::create_user;
pub use user_delete::delete_user;
pub use user_get::get_user;
pub use user_list::list_users;
pub use user_update::update_user;
