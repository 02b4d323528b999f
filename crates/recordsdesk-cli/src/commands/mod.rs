//! Command implementations.

pub mod list;
pub mod match_cmd;
pub mod note;
pub mod pii;
pub mod show;
pub mod status;
pub mod submit;

pub use self::list::execute_list;
pub use self::match_cmd::execute_match;
pub use self::note::execute_note;
pub use self::pii::execute_pii;
pub use self::show::execute_show;
pub use self::status::execute_set_status;
pub use self::submit::execute_submit;
