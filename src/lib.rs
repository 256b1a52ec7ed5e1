pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod image_sink;
    }
}

pub mod modules {
    pub mod banners {
        pub mod core {
            pub mod banner;
            pub mod id_locks;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod list_banners {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_banner {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod save_banner {
                pub mod command;
                pub mod errors;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod remove_banner {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod id_param;
            }
            pub mod outbound {
                pub mod banner_store_in_memory;
            }
        }
    }
}

pub mod shell;
