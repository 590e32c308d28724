mod new;
mod print;
