// SecureGen state managers
// Managers handle the persisted state: the signed-in session and the password history.

pub mod history_manager;
pub mod session_manager;
