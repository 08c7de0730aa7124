pub mod application {
    pub mod cart {
        pub mod engine;
    }
    pub mod catalog {
        pub mod get_all;
        pub mod get_by_id;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod engine;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod total;
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod product {
        pub mod model;
        pub mod pricing;
        pub mod value_objects;
    }
}
