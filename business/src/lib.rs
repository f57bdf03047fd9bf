pub mod application {
    pub mod cart {
        pub mod add_product;
        pub mod checkout;
        pub mod compensating_ledger;
        pub mod get;
        pub mod remove_product;
        pub mod update_quantity;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod ledger;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_product;
            pub mod checkout;
            pub mod get;
            pub mod remove_product;
            pub mod update_quantity;
        }
    }
    pub mod product {
        pub mod model;
        pub mod repository;
    }
    pub mod user {
        pub mod model;
        pub mod repository;
    }
}

#[cfg(test)]
pub(crate) mod test_support;
