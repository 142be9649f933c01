pub mod console;
pub mod git;
pub mod ignore;
pub mod lfs;
pub mod repository;
