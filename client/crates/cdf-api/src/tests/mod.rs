mod client;
mod normalizer;
