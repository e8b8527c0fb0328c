mod sign;
mod verify;
