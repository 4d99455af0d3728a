pub mod application {
    pub mod session {
        pub mod login;
        pub mod logout;
    }
    pub mod supply {
        pub mod create;
        pub mod delete;
        pub mod fetch_all;
        pub mod get_by_id;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod session {
        pub mod context;
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod store;
        pub mod use_cases {
            pub mod login;
            pub mod logout;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
    pub mod supply {
        pub mod cache;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod snapshot;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod fetch_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
}
