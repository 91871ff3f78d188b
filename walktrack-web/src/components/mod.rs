pub mod activity_list;
pub mod activity_panel;
pub mod header;
pub mod home;
pub mod nav_bar;
pub mod onboarding;
pub mod profile_panel;
pub mod rewards_panel;
pub mod route_panel;
pub mod toast;
