mod create_review;
