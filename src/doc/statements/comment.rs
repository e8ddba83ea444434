/*!
# `C <remark>`

## Purpose
Remarks for people reading the program.

## Remarks
A line whose first character is an uppercase `C` is thrown away when
the program is loaded, as are empty lines. This means `C = 1` is a
comment; assign to `c` instead. Comments do not count towards the
100 line limit.

## Example
```text
C ADD TWO NUMBERS
A = 2 + 3

WRITE A
```

*/
