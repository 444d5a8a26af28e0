mod app_shell;
pub use app_shell::AppShell;

mod home;
pub use home::Home;

mod profile;
pub use profile::Profile;

mod settings;
pub use settings::Settings;

mod new_environment;
pub use new_environment::NewEnvironment;
