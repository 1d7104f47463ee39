mod remove_exact_paths_from_index;
mod remove_everything_with_dot;
