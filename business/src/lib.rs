pub mod application {
    pub mod cart {
        pub mod add_product;
        pub mod get_cart;
        pub mod manager;
        pub mod remove_product;
        pub mod update_amount;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod notifier;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod store;
        pub mod use_cases {
            pub mod add_product;
            pub mod get_cart;
            pub mod remove_product;
            pub mod update_amount;
        }
    }
}
