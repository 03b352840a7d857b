mod progress;
mod resolution;
mod sequence;
