pub mod contact;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod icon;
pub mod navbar;
pub mod process;
pub mod statement;
pub mod testimonial;
pub mod venue;
