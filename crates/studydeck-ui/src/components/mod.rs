pub(crate) mod button;
pub(crate) mod conversation;
pub(crate) mod session_detail;
pub(crate) mod session_list;
pub(crate) mod shell;
pub(crate) mod timeline;
