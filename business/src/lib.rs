pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get;
        pub mod remove_item;
        pub mod update_quantity;
    }
    pub mod checkout {
        pub mod submit;
    }
    pub mod product {
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_categories;
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
        pub mod model;
        pub mod store;
        pub mod subscriber;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get;
            pub mod remove_item;
            pub mod update_quantity;
        }
    }
    pub mod checkout {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod submit;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_categories;
        }
    }
}
