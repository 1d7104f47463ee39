mod add_files_from_nested_directories_to_index_successfully;
mod add_single_file_to_index_successfully;
mod adding_a_non_existent_file_is_skipped;
