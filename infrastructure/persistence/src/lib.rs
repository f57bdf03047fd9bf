pub mod db;
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod checkout {
    pub mod ledger;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}
