/*!
# `END`

## Purpose
Immediately and unconditionally stop running the program.

## Remarks
Any line starting with `END` stops the program, so `ENDING` does too.
The keyword must be uppercase.
`END` at the end of a program is optional.
Lines after `END` are never looked at.

## Example
```text
A = 1
WRITE A
END
WRITE A
```
Prints `1` once.

*/
