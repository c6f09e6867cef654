pub mod admin_users;
