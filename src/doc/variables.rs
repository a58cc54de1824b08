/*!
# Variables and Arithmetic

A variable is a name that refers to a value. Assigning to the same name
again replaces the value; the old one is gone.

```text
name = "Rehan"
age = 21
isMarried = True
```

Each value has a type. The lesson uses four of them.

 * Text, written between quotes.
 * Integer, a whole number.
 * Boolean, either `True` or `False`.
 * Float, a number with a fractional part.

Printing several values on one line separates them with a space. The
label `"Sum is: "` already ends with a space, so the output shows two.

```text
Sum is:  15
Sub is:  26
```

## Operators

| Operator | Meaning        | `50 op 24`            |
|----------|----------------|-----------------------|
| `+`      | addition       | `74`                  |
| `-`      | subtraction    | `26`                  |
| `/`      | division       | `2.0833333333333335`  |
| `*`      | multiplication | `1200`                |
| `**`     | exponentiation | `5.960464477539063e+40` |

Division always produces a Float, even when both sides are Integers.
Exponentiation stays an Integer while the answer fits in 64 bits; `50 ** 24`
does not, so it becomes a Float.

Adding two texts joins them. Mixing text with a number is a `?TYPE MISMATCH`.

## Input

Run with `--input` and the first two numbers are typed in instead of fixed.

```text
Enter first number: 5
Enter second number: 10
Sum is:  15
```

A reply that is not a whole number stops the lesson with `?INVALID NUMBER`.

*/
