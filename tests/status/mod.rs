mod list_untracked_files_in_name_order;
