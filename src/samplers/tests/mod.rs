mod grid;
mod random;
mod static_sampler;
