pub mod shared {
    pub mod core {
        pub mod clock;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod activity_log;
    }
}

pub mod modules {
    pub mod schedule {
        pub mod core {
            pub mod calendar;
            pub mod intents;
            pub mod schedule_diff;
            pub mod session;
            pub mod work_day;
            pub mod work_hours;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod commit_schedule {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod record_work_hours {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod view_calendar {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod queries_port;
            }
            pub mod edit_schedule {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
                pub mod registry;
            }
            pub mod list_activity {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod activity_log;
                pub mod schedule_cache;
                pub mod store;
                pub mod store_in_memory;
            }
        }
    }
}

pub mod shell;
