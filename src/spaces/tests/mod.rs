mod function_space;
mod points;
