mod delete_bootcamp;
mod get_bootcamps_in_radius;
