mod get_courses;
