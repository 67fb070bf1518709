pub mod sampler_file;
