pub mod book_mapper;

pub use book_mapper::BookMapper;
