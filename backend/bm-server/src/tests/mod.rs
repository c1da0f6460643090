mod server_error;
