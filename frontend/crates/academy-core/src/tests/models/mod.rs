mod application_form;
mod contact_info;
mod marketer_stats;
mod role;
mod user_profile;
