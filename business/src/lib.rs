pub mod application {
    pub mod product {
        pub mod add_review;
        pub mod create;
        pub mod delete;
        pub mod dispatch;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_vendor_products;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod product {
        pub mod errors;
        pub mod filter;
        pub mod model;
        pub mod ownership;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add_review;
            pub mod create;
            pub mod delete;
            pub mod dispatch;
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_vendor_products;
            pub mod update;
        }
    }
    pub mod user {
        pub mod model;
        pub mod repository;
    }
}
