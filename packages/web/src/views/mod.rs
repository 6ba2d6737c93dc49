mod login;
pub use login::Login;

mod signup;
pub use signup::SignUp;

mod students;
pub use students::Students;
