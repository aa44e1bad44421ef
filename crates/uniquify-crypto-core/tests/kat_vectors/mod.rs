mod derivation;
mod digest;
mod master;
