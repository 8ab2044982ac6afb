pub(crate) mod leading_comments;
