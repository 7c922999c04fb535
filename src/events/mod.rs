pub mod contact;
pub mod nav;
pub mod pointer;
pub mod scroll;
pub mod sections;
