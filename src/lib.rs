pub mod shared {
    pub mod core {
        pub mod validation;
    }
    pub mod infrastructure {
        pub mod http {
            pub mod json_or_form;
            pub mod response;
        }
    }
}

pub mod modules {
    pub mod calendar {
        pub mod core {
            pub mod event;
            pub mod period;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod create_event {
                pub mod command;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_event {
                pub mod command;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod command;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod query;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod in_memory_event_store;
            }
        }
    }
}

pub mod shell;
