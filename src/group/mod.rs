pub mod grouper;
