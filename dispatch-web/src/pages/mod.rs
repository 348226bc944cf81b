mod contact;
mod landing;
mod login;
mod signup;

pub use contact::ContactPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use signup::SignupPage;
