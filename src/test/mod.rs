mod calc;
mod utils;
