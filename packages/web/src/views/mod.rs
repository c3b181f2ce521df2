mod shell;
pub use shell::Shell;

mod home;
pub use home::Home;

mod single;
pub use single::Single;

mod demo;
pub use demo::Demo;

mod register;
pub use register::Register;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::{Dashboard, DashboardLayout};

mod admin;
pub use admin::AdminDash;

mod student;
pub use student::StudentDash;

mod interview;
pub use interview::Interview;

mod professional;
pub use professional::ProfessionalDash;

mod patient;
pub use patient::PatientDash;

mod not_found;
pub use not_found::NotFound;
