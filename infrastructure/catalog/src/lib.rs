pub mod product {
    pub mod entity;
    pub mod repository;
    pub mod seed;
}
