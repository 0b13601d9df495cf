//! Unit test tree mirroring the src module layout

mod builder;
mod compose;
mod io;
