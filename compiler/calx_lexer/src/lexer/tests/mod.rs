mod errors;
mod unicode;
