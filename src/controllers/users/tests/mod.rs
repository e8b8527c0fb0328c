mod get_users;
