/*!
# Statements

Every line of a Minitran program that is not a comment is one
statement. Lines that are not one of these are skipped without
complaint.

*/

#[path = "statements/comment.rs"]
#[allow(non_snake_case)]
pub mod C;

#[path = "statements/end.rs"]
#[allow(non_snake_case)]
pub mod END;

#[path = "statements/assignment.rs"]
#[allow(non_snake_case)]
pub mod ASSIGN;

#[path = "statements/write.rs"]
#[allow(non_snake_case)]
pub mod WRITE;
