mod forgot_password;
mod login;
mod me;
