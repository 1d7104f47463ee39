mod show_log_with_no_save_points;
